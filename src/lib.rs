pub mod handlers {
    pub mod classify;
}

pub mod models {
    pub mod breed;
    pub mod error;
    pub mod event;
    pub mod inference;
}

pub mod utils {
    pub mod endpoint;
    pub mod http;
    pub mod settings;
}
