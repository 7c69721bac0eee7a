pub mod jobs;
pub mod pages;

#[cfg(test)]
pub mod testing;
