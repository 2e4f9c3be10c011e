mod hw;

pub use hw::{validate, HoltWinters};
