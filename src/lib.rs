pub mod core {
    pub mod command;
    pub mod domain;
    pub mod events;
    pub mod library;
}

pub mod books;
pub mod catalog;
pub mod checkout;
pub mod gateway;

pub mod utils {
    pub mod date;
    pub mod logs;
}
