pub mod inspect;
pub mod pack;
pub mod tag_match;
