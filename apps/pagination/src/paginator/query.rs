//! Carry-through of the caller's query parameters into page links.

/// Key owned by the paginator; never echoed back from caller parameters.
pub const PAGE_KEY: &str = "page";

/// Form-urlencodes `params` (minus any `page` key) as `&k=v&k2=v2`.
///
/// Returns `""` when nothing is left to carry.
pub fn encode_carry_params<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut carried = 0usize;
    for (key, value) in params {
        if key == PAGE_KEY {
            continue;
        }
        serializer.append_pair(key, value);
        carried += 1;
    }

    if carried == 0 {
        return String::new();
    }
    format!("&{}", serializer.finish())
}
