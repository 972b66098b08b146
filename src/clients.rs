pub mod base;
pub mod supabase;

pub use base::TableClient;
pub use supabase::SupabaseClient;
