pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod native_callback_datasource;
        pub(crate) mod purchases_wrapper_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod native_callbacks {
            pub(crate) mod products_response_model;
            pub(crate) mod purchaser_info_response_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod purchases_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod decoded_purchase_response;
        pub mod native_call;
        pub mod platform;
        pub mod product;
        pub mod product_type;
        pub mod purchase_error;
        pub mod purchase_route;
        pub mod purchaser_info;
    }
    pub mod repositories {
        pub mod native_bridge;
        pub mod purchases_repository;
    }
    pub mod listener;
}

pub mod bridge;
pub mod config;
pub mod errors;
