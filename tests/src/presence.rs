mod poller;
mod prober;
mod webhook;
