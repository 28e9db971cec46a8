mod test_archive;
mod test_csv;
