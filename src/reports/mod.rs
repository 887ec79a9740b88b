mod tables;

pub use self::tables::frequency as print_frequency_table;
