mod query_error;
