//! Networks supported by the wallet service.

use super::{ChainDescriptor, ChainId, NativeCurrency, NetworkId};

const MATIC: NativeCurrency = NativeCurrency {
    name: "MATIC",
    symbol: "MATIC",
    decimals: 18,
};

const AVAX: NativeCurrency = NativeCurrency {
    name: "Avalanche",
    symbol: "AVAX",
    decimals: 18,
};

const XDAI: NativeCurrency = NativeCurrency {
    name: "xDAI",
    symbol: "XDAI",
    decimals: 18,
};

const ETH: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

/// Chains the wallet service can operate on, in registry order.
pub const SUPPORTED_CHAINS: &[ChainDescriptor] = &[
    ChainDescriptor {
        id: ChainId(137),
        name: "Polygon",
        native_currency: MATIC,
        rpc_urls: &["https://polygon-rpc.com"],
    },
    ChainDescriptor {
        id: ChainId(80001),
        name: "Polygon Mumbai",
        native_currency: MATIC,
        rpc_urls: &["https://rpc.ankr.com/polygon_mumbai"],
    },
    ChainDescriptor {
        id: ChainId(43114),
        name: "Avalanche",
        native_currency: AVAX,
        rpc_urls: &["https://api.avax.network/ext/bc/C/rpc"],
    },
    ChainDescriptor {
        id: ChainId(43113),
        name: "Avalanche Fuji",
        native_currency: AVAX,
        rpc_urls: &["https://api.avax-test.network/ext/bc/C/rpc"],
    },
    ChainDescriptor {
        id: ChainId(100),
        name: "Gnosis",
        native_currency: XDAI,
        rpc_urls: &["https://rpc.gnosischain.com"],
    },
    ChainDescriptor {
        id: ChainId(10200),
        name: "Gnosis Chiado",
        native_currency: XDAI,
        rpc_urls: &["https://rpc.chiadochain.net"],
    },
    ChainDescriptor {
        id: ChainId(1101),
        name: "Polygon zkEVM",
        native_currency: ETH,
        rpc_urls: &["https://zkevm-rpc.com"],
    },
    ChainDescriptor {
        id: ChainId(1442),
        name: "Polygon zkEVM Testnet",
        native_currency: ETH,
        rpc_urls: &["https://rpc.public.zkevm-test.net"],
    },
    ChainDescriptor {
        id: ChainId(2_124_901),
        name: "Muster Testnet",
        native_currency: ETH,
        rpc_urls: &["https://muster-anytrust.alt.technology"],
    },
    ChainDescriptor {
        id: ChainId(17001),
        name: "Redstone Holesky",
        native_currency: ETH,
        rpc_urls: &["https://rpc.holesky.redstone.xyz"],
    },
];

/// Look up the descriptor for a numeric chain id.
#[must_use]
pub fn find_chain(id: ChainId) -> Option<&'static ChainDescriptor> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.id == id)
}

/// Whether the wallet service recognizes the given network id.
#[must_use]
pub fn is_supported_network(network: &NetworkId) -> bool {
    SUPPORTED_CHAINS
        .iter()
        .any(|chain| chain.id.to_network_id() == *network)
}
