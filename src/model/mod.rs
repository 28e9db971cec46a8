/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP request helper with retry on rate limiting
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
/// Field access helpers for unstructured asset records
pub mod utils;
