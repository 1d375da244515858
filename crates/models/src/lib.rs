pub mod errors;
pub mod db;
pub mod services;
pub mod contacts;

#[cfg(test)]
mod tests;
