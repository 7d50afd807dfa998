// mod.rs - Table loaders

pub mod tsv;

pub use tsv::{load_gene_list, load_sample_table};
