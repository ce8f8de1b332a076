pub mod shared {
    pub mod application {
        pub mod errors;
    }
    pub mod inbound;
    pub mod infrastructure {
        pub mod activity_store;
    }
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
        }
        pub mod use_cases {
            pub mod list_activities {
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod get_activity {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
