mod otp_cache_repository_tests;
mod redis_client_tests;
