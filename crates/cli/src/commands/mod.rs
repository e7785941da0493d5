pub(crate) mod sum;
pub(crate) mod test;
