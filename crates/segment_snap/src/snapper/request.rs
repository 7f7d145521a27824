use geo_types::Coord;

/// `[a,b], [c,d]` -> `a,b;c,d`
pub(super) fn encode_coordinates(lon_lats: &[Coord<f64>]) -> String {
    lon_lats
        .iter()
        .map(|coord| format!("{},{}", coord.x, coord.y))
        .collect::<Vec<_>>()
        .join(";")
}

/// One radius per input point.
pub(super) fn encode_radiuses(count: usize, radius_m: f64) -> String {
    std::iter::repeat_n(radius_m.to_string(), count)
        .collect::<Vec<_>>()
        .join(";")
}

pub(super) fn build_route_url(
    base: &str,
    lon_lats: &[Coord<f64>],
    radius_m: f64,
    extra_query: Option<&str>,
) -> String {
    let mut url = format!(
        "{}/{}?radiuses={}&geometries=geojson",
        base.trim_end_matches('/'),
        encode_coordinates(lon_lats),
        encode_radiuses(lon_lats.len(), radius_m),
    );
    if let Some(extra) = extra_query {
        url.push('&');
        url.push_str(extra);
    }
    url
}
