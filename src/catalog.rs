pub mod domain;
pub mod factory;

pub mod command {
    pub mod add_book_cmd;
}
