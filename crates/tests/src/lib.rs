#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod case_tests;

#[cfg(test)]
mod report_tests;

#[cfg(test)]
mod case_type_tests;

#[cfg(test)]
mod profile_tests;
