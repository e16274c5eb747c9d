pub mod domain;
pub mod factory;

pub mod command {
    pub mod checkout_book_cmd;
    pub mod late_fee_cmd;
    pub mod return_book_cmd;
}
