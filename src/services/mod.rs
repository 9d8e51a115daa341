// Services talking to the listing server

pub mod listing;
