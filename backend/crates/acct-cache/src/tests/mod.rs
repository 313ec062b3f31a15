mod user_cache;
