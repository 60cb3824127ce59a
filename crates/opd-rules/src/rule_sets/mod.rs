pub mod allopathic;
pub mod homeopathic;
