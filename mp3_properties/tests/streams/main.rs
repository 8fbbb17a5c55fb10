#![allow(missing_docs)]

mod properties;
mod resync;
pub(crate) mod util;
