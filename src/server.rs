use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Top-level envelope returned by `GetServerList`
#[derive(Debug, Default, Deserialize)]
pub struct ServerListEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: ServerListResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub servers: Vec<ServerRecord>,
}

/// One game server entry. Missing and `null` fields decode as zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub addr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gameport: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub steamid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub appid: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub gamedir: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub players: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub max_players: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub bots: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub map: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secure: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dedicated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub os: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gametype: String,
}

impl ServerRecord {
    /// Split `addr` into host and port. A missing port yields an empty string.
    pub fn split_address(&self) -> (&str, &str) {
        self.addr.rsplit_once(':').unwrap_or((self.addr.as_str(), ""))
    }
}

/// `{field:value ...}` dump used by `--debug`
impl fmt::Display for ServerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Addr:{} Gameport:{} Steamid:{} Name:{} Appid:{} Gamedir:{} Version:{} Product:{} Region:{} Players:{} MaxPlayers:{} Bots:{} Map:{} Secure:{} Dedicated:{} Os:{} Gametype:{}}}",
            self.addr,
            self.gameport,
            self.steamid,
            self.name,
            self.appid,
            self.gamedir,
            self.version,
            self.product,
            self.region,
            self.players,
            self.max_players,
            self.bots,
            self.map,
            self.secure,
            self.dedicated,
            self.os,
            self.gametype
        )
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a `GetServerList` body into its server records
pub fn decode_server_list(body: &[u8]) -> Result<Vec<ServerRecord>> {
    let envelope: ServerListEnvelope =
        serde_json::from_slice(body).context("failed to decode server list")?;
    Ok(envelope.response.servers)
}

/// Sort by name, byte-wise ascending. Equal names keep response order.
pub fn sort_by_name(servers: &mut [ServerRecord]) {
    servers.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "response": {
            "servers": [
                {
                    "addr": "192.168.1.10:2302",
                    "gameport": 2303,
                    "steamid": "90112233445566778",
                    "name": "Zulu",
                    "appid": 221100,
                    "gamedir": "dayz",
                    "version": "1.25.158593",
                    "product": "dayz",
                    "region": 255,
                    "players": 10,
                    "max_players": 60,
                    "bots": 0,
                    "map": "chernarusplus",
                    "secure": true,
                    "dedicated": true,
                    "os": "w",
                    "gametype": "battleye,no3rd,lqs4,etm2.0,entm0.5,12:30"
                },
                { "addr": "10.0.0.1:27015", "name": "Alpha", "players": 5 }
            ]
        }
    }"#;

    #[test]
    fn test_decode_server_list() {
        let servers = decode_server_list(SAMPLE.as_bytes()).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].name, "Zulu");
        assert_eq!(servers[0].appid, 221100);
        assert_eq!(servers[0].max_players, 60);
        assert!(servers[0].secure);
        assert_eq!(servers[1].gameport, 0);
        assert_eq!(servers[1].gametype, "");
    }

    #[test]
    fn test_decode_without_servers() {
        assert!(decode_server_list(b"{\"response\":{}}").unwrap().is_empty());
        assert!(decode_server_list(b"{}").unwrap().is_empty());
    }

    #[test]
    fn test_decode_null_fields() {
        let body = br#"{"response":{"servers":[
            {"name":"a","version":null,"players":null,"secure":null,"addr":"1.2.3.4:2302"},
            {"name":"b","version":"1.25"}
        ]}}"#;
        let servers = decode_server_list(body).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].version, "");
        assert_eq!(servers[0].players, 0);
        assert!(!servers[0].secure);
        assert_eq!(servers[0].addr, "1.2.3.4:2302");
        assert_eq!(servers[1].version, "1.25");

        assert!(decode_server_list(br#"{"response":{"servers":null}}"#).unwrap().is_empty());
        assert!(decode_server_list(br#"{"response":null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        assert!(decode_server_list(b"{\"response\":").is_err());
        assert!(decode_server_list(b"{\"response\":{\"servers\":[{\"players\":\"many\"}]}}").is_err());
    }

    #[test]
    fn test_sort_by_name() {
        let mut servers = decode_server_list(SAMPLE.as_bytes()).unwrap();
        sort_by_name(&mut servers);
        assert_eq!(servers[0].name, "Alpha");
        assert_eq!(servers[1].name, "Zulu");
    }

    #[test]
    fn test_sort_is_byte_wise() {
        let mut servers: Vec<ServerRecord> = ["beta", "Zulu", "alpha", "Alpha"]
            .iter()
            .map(|n| ServerRecord {
                name: n.to_string(),
                ..Default::default()
            })
            .collect();
        sort_by_name(&mut servers);
        let names: Vec<&str> = servers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zulu", "alpha", "beta"]);
    }

    #[test]
    fn test_split_address() {
        let server = ServerRecord {
            addr: "1.2.3.4:27015".to_string(),
            ..Default::default()
        };
        assert_eq!(server.split_address(), ("1.2.3.4", "27015"));

        let server = ServerRecord {
            addr: "1.2.3.4".to_string(),
            ..Default::default()
        };
        assert_eq!(server.split_address(), ("1.2.3.4", ""));
    }

    #[test]
    fn test_debug_dump() {
        let server = ServerRecord {
            addr: "1.2.3.4:2302".to_string(),
            name: "Test".to_string(),
            players: 3,
            ..Default::default()
        };
        let dump = server.to_string();
        assert!(dump.starts_with("{Addr:1.2.3.4:2302 Gameport:0"));
        assert!(dump.contains("Name:Test"));
        assert!(dump.contains("Players:3 MaxPlayers:0"));
        assert!(dump.ends_with("Gametype:}"));
    }
}
