pub mod birthday_form;
pub mod cards;
pub mod category_ring;
pub mod confetti;
pub mod dashboard;
pub mod header;
pub mod icons;
pub mod landing;
