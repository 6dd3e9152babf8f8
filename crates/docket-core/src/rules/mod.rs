pub mod validation;

pub use validation::{
    ensure_future_date, ensure_max_len, MAX_ADDRESS_LEN, MAX_DESCRIPTION_LEN, MAX_ID_LEN,
    MAX_NAME_LEN,
};
