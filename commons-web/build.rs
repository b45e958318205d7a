//! Re-export `COMMONS_*` settings from `.env` (or the build environment) as
//! compile-time variables so the browser build can read them with `option_env!`.

fn main() {
    println!("cargo:rerun-if-changed=.env");

    let from_file = match dotenvy::dotenv_iter() {
        Ok(iter) => iter.filter_map(Result::ok).collect::<Vec<_>>(),
        Err(_) => Vec::new(),
    };

    for (key, value) in from_file {
        if key.starts_with("COMMONS_") && std::env::var_os(&key).is_none() {
            println!("cargo:rustc-env={key}={value}");
        }
    }

    for (key, _) in std::env::vars() {
        if key.starts_with("COMMONS_") {
            println!("cargo:rerun-if-env-changed={key}");
        }
    }
}
