use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use std::{
    convert::Infallible,
    net::{IpAddr, SocketAddr},
};

/// Header set by the reverse proxy in front of the board.
pub const REAL_IP_HEADER: &str = "x-real-ip";

/// Address used when neither the proxy header nor the peer is known.
pub const UNKNOWN_IP: &str = "unknown";

/// Client address: `X-Real-IP` when present, else the TCP peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(ClientIp(client_ip(&parts.headers, peer)))
    }
}

pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get(REAL_IP_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match (forwarded, peer) {
        (Some(value), _) => normalize(value),
        (None, Some(addr)) => addr.ip().to_canonical().to_string(),
        (None, None) => UNKNOWN_IP.to_string(),
    }
}

/// `1.2.3.4:80` → `1.2.3.4`, `[::1]:80` → `::1`, `::ffff:1.2.3.4` → `1.2.3.4`.
///
/// Addresses are printed in canonical form so that one client always maps
/// to one rate-limit counter. Values that are not addresses pass through.
fn normalize(value: &str) -> String {
    let ip = value
        .parse::<IpAddr>()
        .or_else(|_| value.parse::<SocketAddr>().map(|addr| addr.ip()));

    match ip {
        Ok(ip) => ip.to_canonical().to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer(addr: &str) -> Option<SocketAddr> {
        Some(addr.parse().unwrap())
    }

    #[test]
    fn prefers_real_ip_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REAL_IP_HEADER, HeaderValue::from_static("203.0.113.7"));

        assert_eq!(client_ip(&headers, peer("10.0.0.1:5555")), "203.0.113.7");
    }

    #[test]
    fn falls_back_to_peer_without_port() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, peer("10.0.0.1:5555")), "10.0.0.1");
        assert_eq!(client_ip(&headers, peer("[2001:db8::1]:443")), "2001:db8::1");
    }

    #[test]
    fn blank_header_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(REAL_IP_HEADER, HeaderValue::from_static("   "));

        assert_eq!(client_ip(&headers, peer("10.0.0.1:5555")), "10.0.0.1");
    }

    #[test]
    fn strips_port_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REAL_IP_HEADER, HeaderValue::from_static("[::1]:8080"));
        assert_eq!(client_ip(&headers, None), "::1");

        headers.insert(REAL_IP_HEADER, HeaderValue::from_static("192.0.2.4:1234"));
        assert_eq!(client_ip(&headers, None), "192.0.2.4");
    }

    #[test]
    fn ipv4_spellings_share_one_key() {
        let mut headers = HeaderMap::new();
        headers.insert(REAL_IP_HEADER, HeaderValue::from_static("::ffff:10.0.0.1"));
        assert_eq!(client_ip(&headers, None), "10.0.0.1");

        headers.insert(REAL_IP_HEADER, HeaderValue::from_static("[::ffff:10.0.0.1]:80"));
        assert_eq!(client_ip(&headers, None), "10.0.0.1");

        assert_eq!(
            client_ip(&HeaderMap::new(), peer("[::ffff:10.0.0.1]:5555")),
            "10.0.0.1"
        );
    }

    #[test]
    fn ipv6_is_printed_compressed() {
        let mut headers = HeaderMap::new();
        headers.insert(REAL_IP_HEADER, HeaderValue::from_static("2001:0db8:0:0:0:0:0:1"));
        assert_eq!(client_ip(&headers, None), "2001:db8::1");
    }

    #[test]
    fn non_address_header_passes_through() {
        let mut headers = HeaderMap::new();
        headers.insert(REAL_IP_HEADER, HeaderValue::from_static("not-an-ip"));
        assert_eq!(client_ip(&headers, None), "not-an-ip");
    }

    #[test]
    fn unknown_without_header_or_peer() {
        assert_eq!(client_ip(&HeaderMap::new(), None), UNKNOWN_IP);
    }
}
