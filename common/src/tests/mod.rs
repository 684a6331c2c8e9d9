mod redacted_key;
