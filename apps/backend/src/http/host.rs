//! Request-host helpers shared by the identity middleware chain.

use actix_web::dev::ServiceRequest;
use actix_web::http::header;

/// The host the client addressed, as it appeared on the wire: the Host
/// header when present, otherwise the request-target authority. Empty when
/// the client sent neither.
pub fn request_host(req: &ServiceRequest) -> String {
    if let Some(host) = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
    {
        return host.to_string();
    }

    req.uri()
        .authority()
        .map(|authority| authority.as_str().to_string())
        .unwrap_or_default()
}

/// Drop a trailing `:port` from a host value.
///
/// Truncates at the FIRST colon; bracketed IPv6 literals are not supported.
pub fn strip_port(hostport: &str) -> &str {
    match hostport.find(':') {
        Some(colon) => &hostport[..colon],
        None => hostport,
    }
}

#[cfg(test)]
mod tests {
    use super::strip_port;

    #[test]
    fn plain_hostname_is_unchanged() {
        assert_eq!(strip_port("acme.example.com"), "acme.example.com");
    }

    #[test]
    fn port_suffix_is_dropped() {
        assert_eq!(strip_port("acme.example.com:3000"), "acme.example.com");
        assert_eq!(strip_port("localhost:80"), "localhost");
    }

    #[test]
    fn empty_host_stays_empty() {
        assert_eq!(strip_port(""), "");
    }

    // Pins the truncate-at-first-colon rule: bracketed IPv6 hosts come out
    // mangled rather than parsed. Changing this changes which hostnames the
    // tenant lookup ever sees.
    #[test]
    fn ipv6_literal_truncates_at_first_colon() {
        assert_eq!(strip_port("[::1]:8080"), "[");
        assert_eq!(strip_port("::1"), "");
    }
}
