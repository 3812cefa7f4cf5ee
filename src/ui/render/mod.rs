mod all;
mod applications;
mod footer;
mod log;
mod personal_info;
mod status;
mod stepper;
mod summary;

use self::log::log;
use super::*;
use applications::applications;
use footer::footer;
use personal_info::personal_info;
use status::status;
use stepper::stepper;
use summary::summary;

pub use all::all as render;
