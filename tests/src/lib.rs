mod presence;
mod utils;
