//! Solidity interface of the token gateway.

use alloy_sol_types::sol;

sol! {
    /// Authorization registry and relay surface for factory-deployed tokens.
    interface ITokenGateway {
        /// Emitted when `manager` joins the manager set.
        event ManagerAdded(address indexed manager);
        /// Emitted when `manager` leaves the manager set.
        event ManagerRemoved(address indexed manager);
        /// Emitted when the admin role changes hands.
        event AdminTransferred(address indexed previousAdmin, address indexed newAdmin);

        function addManager(address manager) external;
        function removeManager(address manager) external;
        function transferGatewayOwnership(address newAdmin) external;

        function ERC721_mint(address nftContract, address recipient, uint256 tokenId) external;
        function ERC721_mintBatch(address nftContract, address recipient, uint256[] calldata tokenIds) external;
        function ERC1155_mint(address nftContract, address account, uint256 id, uint256 amount, bytes calldata data) external;
        function ERC1155_mintBatch(address nftContract, address to, uint256[] calldata ids, uint256[] calldata amounts, bytes calldata data) external;
        function ERC20_mint(address erc20Contract, address recipient, uint256 amount) external;
        function resetOwner(address _contract, address _newOwner) external;
    }
}
