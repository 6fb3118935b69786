// Copyright 2024 Wladimir Palant
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![doc = include_str!("../README.md")]

mod hosts;
mod ranking;
mod requests;
mod status;

pub use hosts::{top10_hosts, top5_reqs_of_top_hosts, HostRequests, TOP_HOSTS, TOP_HOST_REQUESTS};
pub use ranking::{top_n, Ranked};
pub use requests::{top10_requests, top10_unsuccess_requests, TOP_REQUESTS};
pub use status::{
    is_successful, is_unsuccessful, success_req_percentage, unsuccess_req_percentage,
    unsuccessful_requests, AnalysisError,
};
