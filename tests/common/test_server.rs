use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable, BinEncoder};
use palisade_dns_infrastructure::{ArcSwapListStore, DnsEngine, MutexStatsLog, UdpForwarder};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::UdpSocket;

/// A fake upstream resolver that answers every query with one A record
/// pointing at `answer_ip`. Stands in for the real internet in tests.
pub async fn spawn_fake_upstream(answer_ip: Ipv4Addr) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        loop {
            let (len, from) = match socket.recv_from(&mut buf).await {
                Ok(result) => result,
                Err(_) => continue,
            };
            let query = match Message::from_bytes(&buf[..len]) {
                Ok(message) => message,
                Err(_) => continue,
            };
            let Some(question) = query.queries().first().cloned() else {
                continue;
            };

            let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
            response.set_recursion_desired(query.recursion_desired());
            response.set_recursion_available(true);
            response.set_response_code(ResponseCode::NoError);
            response.add_query(question.clone());

            let mut record = Record::from_rdata(question.name().clone(), 300, RData::A(A(answer_ip)));
            record.set_dns_class(DNSClass::IN);
            response.add_answer(record);

            let mut out = Vec::with_capacity(128);
            let mut encoder = BinEncoder::new(&mut out);
            response.emit(&mut encoder).unwrap();

            let _ = socket.send_to(&out, from).await;
        }
    });

    addr
}

/// A running DNS engine bound to a loopback UDP socket, plus handles to
/// its list store and stats log so tests can seed lists and inspect
/// counters/logs.
pub struct TestServer {
    pub dns_addr: SocketAddr,
    pub list_store: Arc<ArcSwapListStore>,
    pub stats_log: Arc<MutexStatsLog>,
}

impl TestServer {
    pub async fn start(upstream_addr: SocketAddr, sinkhole_ip: Ipv4Addr) -> Self {
        let list_store = Arc::new(ArcSwapListStore::new());
        let stats_log = Arc::new(MutexStatsLog::new());
        let forwarder = Arc::new(UdpForwarder::new());

        let engine = Arc::new(DnsEngine::new(
            list_store.clone(),
            stats_log.clone(),
            forwarder,
            upstream_addr.to_string(),
            sinkhole_ip,
        ));

        let socket = palisade_dns::server::bind("127.0.0.1:0".parse().unwrap())
            .await
            .unwrap();
        let dns_addr = socket.local_addr().unwrap();

        tokio::spawn(palisade_dns::server::serve(socket, engine));

        Self {
            dns_addr,
            list_store,
            stats_log,
        }
    }
}

/// Sends a real A-record query over UDP and returns the parsed response.
pub async fn query_a(server_addr: SocketAddr, domain: &str) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    let mut query = Query::new();
    query.set_name(Name::from_str(domain).unwrap());
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(0x1234, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(128);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();

    socket.send_to(&buf, server_addr).await.unwrap();

    let mut response_buf = [0u8; 4096];
    let len = tokio::time::timeout(std::time::Duration::from_secs(2), socket.recv(&mut response_buf))
        .await
        .expect("query timed out")
        .unwrap();

    Message::from_bytes(&response_buf[..len]).unwrap()
}
