#[cfg(test)]
mod common;

#[cfg(test)]
mod register_flow_tests;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod password_field_tests;

#[cfg(test)]
mod config_tests;
