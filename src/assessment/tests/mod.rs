mod common;

mod dataset;
