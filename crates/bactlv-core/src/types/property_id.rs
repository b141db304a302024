use crate::encoding::enumerated::bacnet_enumeration;

bacnet_enumeration! {
    /// BACnet property identifiers. Codes from 512 upwards belong to vendors.
    pub enum PropertyIdentifier("BACnetPropertyIdentifier") {
        AckedTransitions = 0,
        AckRequired = 1,
        Action = 2,
        ActionText = 3,
        ActiveText = 4,
        AlarmValue = 6,
        AlarmValues = 7,
        All = 8,
        ApduSegmentTimeout = 10,
        ApduTimeout = 11,
        ApplicationSoftwareVersion = 12,
        ChangeOfStateCount = 15,
        NotificationClass = 17,
        CovIncrement = 22,
        Deadband = 25,
        Description = 28,
        DeviceAddressBinding = 30,
        DeviceType = 31,
        EventEnable = 35,
        EventState = 36,
        EventType = 37,
        FaultValues = 39,
        FirmwareRevision = 44,
        HighLimit = 45,
        InactiveText = 46,
        LimitEnable = 52,
        Location = 58,
        LowLimit = 59,
        MaxApduLengthAccepted = 62,
        MaxPresValue = 65,
        MinPresValue = 69,
        ModelName = 70,
        NotifyType = 72,
        NumberOfApduRetries = 73,
        NumberOfStates = 74,
        ObjectIdentifier = 75,
        ObjectList = 76,
        ObjectName = 77,
        ObjectType = 79,
        Optional = 80,
        OutOfService = 81,
        Polarity = 84,
        PresentValue = 85,
        Priority = 86,
        PriorityArray = 87,
        ProtocolVersion = 98,
        Reliability = 103,
        RelinquishDefault = 104,
        Required = 105,
        Resolution = 106,
        SegmentationSupported = 107,
        StateText = 110,
        StatusFlags = 111,
        SystemStatus = 112,
        TimeDelay = 113,
        Units = 117,
        UpdateInterval = 118,
        UtcOffset = 119,
        VendorIdentifier = 120,
        VendorName = 121,
        ProtocolRevision = 139,
        DatabaseRevision = 155,
        ProfileName = 168,
        DoorAlarmState = 226,
        DoorMembers = 228,
        DoorStatus = 231,
        PropertyList = 371,
    }
    vendor_proprietary VendorProprietary = 9999;
}
