pub mod current_user;
pub mod login;
pub mod logout;

#[cfg(test)]
pub(crate) mod test_support;
