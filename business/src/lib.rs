pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod search;
    }
    pub mod cart {
        pub mod add_item;
        pub mod get_cart;
        pub mod remove_item;
        pub(crate) mod revision;
    }
    pub mod cart_mutation {
        pub mod controller;
        pub mod in_flight;
        pub mod session_store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod search;
        pub mod use_cases {
            pub mod get_all;
            pub mod search;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod summary;
        pub mod use_cases {
            pub mod add_item;
            pub mod get_cart;
            pub mod remove_item;
        }
    }
    pub mod cart_mutation {
        pub mod errors;
        pub mod navigator;
        pub mod notifier;
        pub mod policy;
        pub mod store;
        pub mod use_cases {
            pub mod checkout;
            pub mod decrement;
            pub mod increment;
        }
    }
}

#[cfg(test)]
mod test_support;
