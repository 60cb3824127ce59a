pub mod advice;
pub mod clinic;
pub mod mode;
pub mod request;
pub mod suggestion;
pub mod template;
pub mod visit;
pub mod vitals;
