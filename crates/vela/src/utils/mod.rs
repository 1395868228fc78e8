pub mod api_response;
pub mod best_records;
pub mod parse_number;
