pub mod json_list;
#[cfg(test)]
pub mod test_helpers;
pub mod timestamp;
pub mod types;
pub mod validation;
