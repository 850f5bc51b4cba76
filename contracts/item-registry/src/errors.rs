use soroban_sdk::contracterror;

/// Error codes for the item registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// No item with the given id has been minted
    ItemNotFound = 3,
    /// `from` does not currently hold custody of the item
    NotCustodian = 4,
}
