#[cfg(test)]
pub mod common;


#[cfg(test)]
mod test_appraisal_narrowing;

#[cfg(test)]
mod test_records;

#[cfg(test)]
mod test_box_files;
