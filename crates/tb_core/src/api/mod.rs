pub mod json_api;

pub use json_api::{
    balance_json, balance_json_with_config, balance_request, request_schema_json, BalanceRequest,
    BalanceResponse,
};
