mod reference;
mod sla_threshold;

use super::*;
use test_utils::builder::TestBuilder;
