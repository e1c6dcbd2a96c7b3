use serde::{Deserialize, Serialize};

use super::{Contestant, Prize};

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRecord<C = Contestant> {
    pub contestant: C,
    pub prize: Prize,
}

impl<C> WinnerRecord<C> {
    pub fn new(contestant: C, prize: Prize) -> Self {
        WinnerRecord { contestant, prize }
    }
}
