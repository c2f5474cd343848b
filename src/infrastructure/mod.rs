pub mod agent;
pub mod db;
