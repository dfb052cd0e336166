pub mod chained_hash_table;
pub mod hash_function;
pub mod hash_table;
