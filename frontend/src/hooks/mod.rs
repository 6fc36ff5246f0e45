pub mod use_birthday;
pub mod use_celebration;
