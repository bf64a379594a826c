pub mod error;

#[cfg(test)]
mod test;
