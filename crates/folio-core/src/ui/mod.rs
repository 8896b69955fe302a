pub mod form;
pub mod scrollspy;
pub mod tilt;
