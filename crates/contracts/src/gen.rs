use ethers::contract::abigen;

abigen!(
    WalletFactoryAPI,
    r#"[
        function getAddressForCounterfactualWallet(address _owner, uint256 _index) external view returns (address _wallet)
        function deployCounterFactualWallet(address _owner, address _entryPoint, address _handler, uint256 _index) public returns (address proxy)
        function deployWallet(address _owner, address _entryPoint, address _handler) public returns (address proxy)
        function isWalletExist(address _wallet) public view returns (bool)
        event WalletCreated(address indexed _proxy, address indexed _implementation, address indexed _owner)
    ]"#
);

abigen!(
    SmartWalletAPI,
    r#"[
        function owner() public view returns (address)
        function entryPoint() public view returns (address)
        function getNonce(uint256 batchId) public view returns (uint256)
        function updateEntryPoint(address _newEntryPoint) external
        event ExecutionSuccess(bytes32 txHash, uint256 payment)
        event ExecutionFailure(bytes32 txHash, uint256 payment)
    ]"#
);

abigen!(
    MultiSendAPI,
    r#"[
        function multiSend(bytes memory transactions) public payable
    ]"#
);
