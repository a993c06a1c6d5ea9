// Application layer: turns a parsed command into query results.

pub mod query;
