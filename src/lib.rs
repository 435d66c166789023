pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod state;
        }
        pub mod application {
            pub mod command_handler;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod register_time_entry {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod summarize_logged_hours {
                pub mod inbound {
                    pub mod http;
                }
                pub mod summary;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }

    pub mod projects {
        pub mod core {
            pub mod model;
            pub mod selection;
        }
        pub mod use_cases {
            pub mod list_projects {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_tasks_by_project {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_projects_by_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod catalog;
                pub mod catalog_in_memory;
            }
        }
    }

    pub mod calendar {
        pub mod core {
            pub mod import;
            pub mod reconcile;
            pub mod shadow_event;
        }
        pub mod use_cases {
            pub mod list_shadow_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod import_shadow_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod google_calendar;
                pub mod provider;
                pub mod provider_in_memory;
            }
        }
    }

    pub mod accounts {
        pub mod core {
            pub mod model;
            pub mod rules;
        }
        pub mod use_cases {
            pub mod manage_users {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_posts {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_comments {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
}

pub mod shell;
